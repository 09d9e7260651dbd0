mod parse_good;
mod property_roundtrip;
mod tokenize_good;
