//! Shared helpers and struct-operation macros used throughout the crate.
//!
//! Provides the builder-style `with_*` and getter macros used by config and
//! builder types, plus the DNA alphabet used for sequence sanity checks.

use bio::alphabets::Alphabet;
use once_cell::sync::Lazy;

/// Plain DNA alphabet (upper- and lowercase ACGT).
pub static DNA_ALPHABET: Lazy<Alphabet> = Lazy::new(bio::alphabets::dna::alphabet);

/// Returns true if `seq` contains only plain DNA characters.
pub fn is_dna(seq: &str) -> bool {
    DNA_ALPHABET.is_word(seq.as_bytes())
}

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}
pub use getter_fn;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
pub use with_field_fn;
