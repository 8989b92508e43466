//! Smart Size CLI library
//!
//! 全身写真とフォーム入力をRecommendation Serviceへ送信し、サイズ推薦を表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod photo;
pub mod prompt;
