pub mod tabular_source;
