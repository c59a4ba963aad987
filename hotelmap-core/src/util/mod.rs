pub mod price_format;
