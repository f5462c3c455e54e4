/// Trim a user supplied label, treating blank values as absent.
pub(super) fn sanitize_label(value: String) -> Option<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_string())
	}
}
