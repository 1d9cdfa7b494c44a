/// Tokens within `radius` positions of `index`, clipped at both sentence
/// edges. The window is never shifted to make up for a clipped side.
pub fn context_window<T>(tokens: &[T], index: usize, radius: usize) -> &[T] {
    if index >= tokens.len() {
        return &[];
    }
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).saturating_add(1).min(tokens.len());
    &tokens[start..end]
}
