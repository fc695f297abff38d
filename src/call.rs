//! Call sign canonicalization and alias expansion.

/// Portable suffixes dropped from the tail during normalization.
const PORTABLE_SUFFIXES: &[&str] = &["P", "QRP", "M", "MM", "AM", "SOTA"];

/// Collapses a raw call sign to its canonical base for roster matching.
///
/// `DL/K1ABC`, `K1ABC/7/P`, and `K1ABC/QRP` all normalize to `K1ABC`.
/// Idempotent: normalizing a normalized call is a no-op.
pub fn normalize(call: &str) -> String {
    let call = call.trim().to_ascii_uppercase();
    let mut segs: Vec<&str> = call.split('/').filter(|s| !s.is_empty()).collect();

    if has_dx_prefix(&segs) {
        segs.remove(0);
    }

    while segs.len() >= 2 && PORTABLE_SUFFIXES.contains(&segs[segs.len() - 1]) {
        segs.pop();
    }

    // A lone region digit drops only when the base itself carries a digit.
    if segs.len() == 2 && is_region_digit(segs[1]) && contains_digit(segs[0]) {
        segs.pop();
    }

    if segs.len() >= 2 && segs[1..].iter().all(|s| is_region_digit(s)) {
        segs.truncate(1);
    }

    segs.join("/")
}

/// Expands a raw call into its lookup aliases, order-preserving and
/// duplicate-free: the uppercased raw call, its normalized form, the call
/// with a lone trailing region digit stripped, and the call with a leading
/// DX prefix stripped.
pub fn aliases(call: &str) -> Vec<String> {
    let raw = call.trim().to_ascii_uppercase();
    let candidates = [
        raw.clone(),
        normalize(&raw),
        strip_region_digit(&raw),
        strip_dx_prefix(&raw),
    ];

    let mut out = Vec::new();
    for cand in candidates {
        if !cand.is_empty() && !out.contains(&cand) {
            out.push(cand);
        }
    }
    out
}

fn strip_region_digit(call: &str) -> String {
    let segs: Vec<&str> = call.split('/').filter(|s| !s.is_empty()).collect();
    if segs.len() >= 2 && is_region_digit(segs[segs.len() - 1]) {
        return segs[..segs.len() - 1].join("/");
    }
    call.to_string()
}

fn strip_dx_prefix(call: &str) -> String {
    let segs: Vec<&str> = call.split('/').filter(|s| !s.is_empty()).collect();
    if has_dx_prefix(&segs) {
        return segs[1..].join("/");
    }
    call.to_string()
}

fn has_dx_prefix(segs: &[&str]) -> bool {
    segs.len() >= 2
        && (1..=4).contains(&segs[0].len())
        && segs[0].chars().all(|c| c.is_ascii_alphanumeric())
        && contains_digit(segs[1])
}

fn is_region_digit(seg: &str) -> bool {
    seg.len() == 1 && seg.chars().all(|c| c.is_ascii_digit())
}

fn contains_digit(seg: &str) -> bool {
    seg.chars().any(|c| c.is_ascii_digit())
}
