/// Last `/`-separated segment of an artifact path, ignoring trailing slashes.
///
/// Returns `None` when nothing usable is left (`""`, `"/"`, `"."`, `".."`), so a
/// server-supplied path can never point outside the download directory.
pub fn base_name(path: &str) -> Option<&str> {
    let name = path.trim_end_matches('/').rsplit('/').next()?;

    match name {
        "" | "." | ".." => None,
        name => Some(name),
    }
}
