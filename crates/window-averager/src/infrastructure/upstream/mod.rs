mod http_number_source;

pub use http_number_source::HttpNumberSource;
