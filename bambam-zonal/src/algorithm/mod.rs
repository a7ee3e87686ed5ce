pub mod bucketing;
