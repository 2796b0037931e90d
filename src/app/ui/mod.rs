mod details;
mod panels;
mod table;
