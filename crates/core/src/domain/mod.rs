pub mod fact;
