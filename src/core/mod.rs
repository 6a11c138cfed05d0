pub mod catalog;
pub mod matching;
pub mod recommend;
pub mod synth;
pub mod vectorize;
