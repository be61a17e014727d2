//! Restaurant name normalization.
//!
//! Every catalog key goes through [`normalize_name`], so lookups by any
//! spelling of a name (`burger_king`, `BURGER KING`, `Burger King`) agree.

/// Separator used in menu file names in place of spaces.
pub const NAME_SEPARATOR: char = '_';

/// Normalize a restaurant name into its catalog key.
///
/// Separators become spaces, then the name is title-cased: a letter that
/// follows another letter is lower-cased, any other letter is upper-cased.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;

    for ch in raw.chars() {
        let ch = if ch == NAME_SEPARATOR { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

/// File stem under which a restaurant's menu is stored.
pub fn menu_file_stem(name: &str) -> String {
    name.replace(' ', &NAME_SEPARATOR.to_string()).to_lowercase()
}
