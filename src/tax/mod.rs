//! Invoice arithmetic: line items, GST aggregation and amount in words

pub mod gst;
pub mod words;
