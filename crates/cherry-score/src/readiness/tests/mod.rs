mod common;

mod advice;
mod rules;
