/// Last segment of a `.`- or `::`-qualified type name.
///
/// Generic arguments are ignored, so `a::Wrapper<b::C>` yields `Wrapper`.
pub fn short_name(qualified: &str) -> &str {
    let path = qualified
        .split_once('<')
        .map_or(qualified, |(path, _)| path);
    path.rsplit(|c: char| c == '.' || c == ':')
        .next()
        .unwrap_or(path)
}
