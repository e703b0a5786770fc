//! Per-pass recursion state and the depth cap on nested previews.

/// Nested boards expand inline down to this depth; anything deeper renders
/// as an empty placeholder. Board graphs are user-authored, so depth is
/// unbounded in principle and this cap is what guarantees termination.
pub const MAX_RECURSE_DEPTH: usize = 4;

/// Ephemeral state threaded through one render pass. Rebuilt from scratch on
/// every navigation; never cached or shared across passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderContext {
	/// 0 for the route's target document, +1 per inline board expansion.
	pub depth: usize,
	pub id: String,
	/// Tint inherited from the nearest enclosing board that declared one.
	pub color: Option<String>,
}

impl RenderContext {
	/// Context for the route's target document.
	pub fn root(id: impl Into<String>) -> Self {
		Self {
			depth: 0,
			id: id.into(),
			color: None,
		}
	}

	/// Context for a nested document expanded one level down. A child without
	/// its own color keeps the enclosing board's tint.
	pub fn descend(&self, id: impl Into<String>, color: Option<String>) -> Self {
		Self {
			depth: self.depth + 1,
			id: id.into(),
			color: color.or_else(|| self.color.clone()),
		}
	}

	/// Whether a board-type card at this level may still expand inline.
	pub fn can_expand(&self) -> bool {
		self.depth < MAX_RECURSE_DEPTH
	}

	/// Breadcrumbs and the parent link paint only on the active view.
	pub fn shows_chrome(&self) -> bool {
		self.depth == 0
	}

	/// Only cards of the active board respond to the pointer; nested
	/// previews are inert.
	pub fn interactive(&self) -> bool {
		self.depth == 0
	}
}
