use hickory_proto::rr::Name;

/// Lowercase a domain name and put it in fully-qualified form.
///
/// A trailing dot is appended when missing, so the empty name becomes the root, `"."`.
pub fn to_lower_fqdn(name: &str) -> String {
    let mut lower = name.to_lowercase();
    if !lower.ends_with('.') {
        lower.push('.');
    }
    lower
}

/// Render a hickory name in its ASCII form, normalized with [`to_lower_fqdn`].
pub(crate) fn lower_fqdn(name: &Name) -> String {
    to_lower_fqdn(&name.to_ascii())
}
