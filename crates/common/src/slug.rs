//! URL slug helpers.
//!
//! `slugify` folds Vietnamese and common Latin diacritics to ASCII, lowercases
//! and joins alphanumeric runs with `-`. Uniqueness is resolved by the caller
//! with [`candidate`], which produces `base`, `base-1`, `base-2`, ...

const FALLBACK: &str = "item";

fn fold(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' | 'ë' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' | 'û' | 'ü' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' | 'ÿ' => 'y',
        'đ' => 'd',
        'ç' => 'c',
        'ñ' => 'n',
        c if c.is_ascii_alphanumeric() => c,
        _ => return None,
    };
    Some(folded)
}

/// Build the base slug for a title.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        match fold(c) {
            Some(f) => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(f);
            }
            None => pending_dash = true,
        }
    }
    if out.is_empty() {
        FALLBACK.to_string()
    } else {
        out
    }
}

/// The `attempt`-th probe for `base`: `base` itself, then `base-1`, `base-2`, ...
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_vietnamese_titles() {
        assert_eq!(slugify("Lập trình viên Rust"), "lap-trinh-vien-rust");
        assert_eq!(slugify("Kỹ sư Đảm bảo Chất lượng"), "ky-su-dam-bao-chat-luong");
        assert_eq!(slugify("Nhân viên Kinh doanh (Hà Nội)"), "nhan-vien-kinh-doanh-ha-noi");
    }

    #[test]
    fn collapses_separators_and_trims() {
        assert_eq!(slugify("  --Senior   C++ / Go!! "), "senior-c-go");
        assert_eq!(slugify("Backend_Dev 2024"), "backend-dev-2024");
    }

    #[test]
    fn empty_or_symbol_only_title_falls_back() {
        assert_eq!(slugify(""), "item");
        assert_eq!(slugify("!!! ???"), "item");
    }

    #[test]
    fn candidates_probe_linearly() {
        assert_eq!(candidate("dev", 0), "dev");
        assert_eq!(candidate("dev", 1), "dev-1");
        assert_eq!(candidate("dev", 12), "dev-12");
    }
}
