pub mod comic;
