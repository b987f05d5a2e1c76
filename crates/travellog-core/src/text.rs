// crates/travellog-core/src/text.rs

/// Sort key folding used by the alphabetic sort modes.
///
/// Lower-cases the input and maps the Slovak/Czech diacritics to their base
/// Latin letter, so `Žilina` and `Zvolen` sort next to each other. Any other
/// character is only lower-cased (`ä` stays `ä`, `ß` stays `ß`).
///
/// Search matching does **not** go through this function: the record filters
/// use a plain, case-sensitive `contains` on the text as typed.
///
/// # Examples
///
/// ```rust
/// use travellog_core::text::normalize;
///
/// assert_eq!(normalize("Žilina"), "zilina");
/// assert_eq!(normalize("Bratislava"), "bratislava");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'á' | 'Á' => out.push('a'),
            'č' | 'Č' => out.push('c'),
            'ď' | 'Ď' => out.push('d'),
            'é' | 'É' => out.push('e'),
            'í' | 'Í' => out.push('i'),
            'ľ' | 'Ľ' | 'ĺ' | 'Ĺ' => out.push('l'),
            'ň' | 'Ň' => out.push('n'),
            'ó' | 'Ó' | 'ô' | 'Ô' => out.push('o'),
            'ŕ' | 'Ŕ' => out.push('r'),
            'š' | 'Š' => out.push('s'),
            'ť' | 'Ť' => out.push('t'),
            'ú' | 'Ú' => out.push('u'),
            'ý' | 'Ý' => out.push('y'),
            'ž' | 'Ž' => out.push('z'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Broad transliterating fold (`Łódź` -> `lodz`, `Straße` -> `strasse`).
///
/// Used by the country catalog lookup, which is a convenience search over
/// reference data and may be more forgiving than the sort key.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Returns `true` if `q` is blank, i.e. the search predicate is inactive.
#[inline]
pub fn is_blank(q: &str) -> bool {
    q.trim().is_empty()
}
