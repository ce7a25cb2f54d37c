pub mod largest;
