pub mod common;

pub mod a001_page;
pub mod a002_service;
pub mod a003_news;
pub mod a004_tender;
pub mod a005_career;
pub mod a006_complaint;
