/// Builds a local's one-line signature: `prefix name detail`, dropping
/// whichever of `prefix`/`detail` is empty or absent.
pub fn local_signature(prefix: &str, name: &str, detail: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(3);
    if !prefix.is_empty() {
        parts.push(prefix);
    }
    parts.push(name);
    if let Some(detail) = detail {
        if !detail.is_empty() {
            parts.push(detail);
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_signature_includes_prefix_and_type() {
        assert_eq!(local_signature("const", "maxRetries", Some("int")), "const maxRetries int");
    }

    #[test]
    fn import_signature_uses_the_package_path_as_detail() {
        assert_eq!(
            local_signature("import", "foo", Some("example.com/a/b")),
            "import foo example.com/a/b"
        );
    }

    #[test]
    fn missing_detail_is_dropped_not_left_blank() {
        assert_eq!(local_signature("var", "x", None), "var x");
    }

    #[test]
    fn empty_prefix_is_dropped() {
        assert_eq!(local_signature("", "v", Some("*T")), "v *T");
    }
}
