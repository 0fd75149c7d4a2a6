pub mod invalid_banana_in_box;
pub mod nullish_coalescing_not_nullable;
