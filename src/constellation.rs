//! Nearest-neighbour links between tokens.
//!
//! Every unordered pair of tokens closer than the link distance is joined by
//! a faint line whose alpha fades with the distance. The pass is quadratic in
//! the number of tokens, which is fine for the ~100 tokens a background uses
//! but does not scale beyond that.

use crate::token::Token;

/// Default maximum distance, in pixels, at which two tokens are linked.
pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;

/// Alpha of a link between two tokens at zero distance.
const BASE_ALPHA: f64 = 0.2;

/// Alpha lost per pixel of distance.
const ALPHA_FALLOFF: f64 = 1.0 / 1000.0;

/// A line to draw between two tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Start point.
    pub from: (f64, f64),
    /// End point.
    pub to: (f64, f64),
    /// Stroke alpha, always positive.
    pub alpha: f64,
}

/// Returns the stroke alpha of a link spanning `distance` pixels.
///
/// Clamped at zero so that far links are invisible rather than invalid.
pub fn link_alpha(distance: f64) -> f64 {
    (BASE_ALPHA - distance * ALPHA_FALLOFF).max(0.0)
}

/// Computes the links between every pair of tokens closer than `max_distance`.
///
/// Pairs whose alpha clamps to zero are skipped.
pub fn links(tokens: &[Token], max_distance: f64) -> Vec<Link> {
    let mut links = Vec::new();
    for (i, a) in tokens.iter().enumerate() {
        for b in &tokens[i + 1..] {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= max_distance {
                continue;
            }
            let alpha = link_alpha(distance);
            if alpha > 0.0 {
                links.push(Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_at(x: f64, y: f64) -> Token {
        Token {
            x,
            y,
            speed: 1.0,
            opacity: 0.5,
            glyph: '#',
            size: 20.0,
        }
    }

    #[test]
    fn test_threshold() {
        let near = [token_at(0.0, 0.0), token_at(149.0, 0.0)];
        let links_near = links(&near, DEFAULT_LINK_DISTANCE);
        assert_eq!(links_near.len(), 1);
        assert!(links_near[0].alpha > 0.0);

        let far = [token_at(0.0, 0.0), token_at(151.0, 0.0)];
        assert!(links(&far, DEFAULT_LINK_DISTANCE).is_empty());

        // diagonal: 3-4-5 triangle scaled to 150 is not linked
        let edge = [token_at(0.0, 0.0), token_at(90.0, 120.0)];
        assert!(links(&edge, DEFAULT_LINK_DISTANCE).is_empty());
    }

    #[test]
    fn test_alpha_falloff() {
        assert!((link_alpha(0.0) - 0.2).abs() < 1e-12);
        assert!((link_alpha(100.0) - 0.1).abs() < 1e-12);
        assert_eq!(link_alpha(200.0), 0.0);
        assert_eq!(link_alpha(1000.0), 0.0);
    }

    #[test]
    fn test_large_distance_never_draws() {
        // a wide link distance lets pairs past the alpha cutoff through the
        // distance check; they must still be dropped
        let tokens = [token_at(0.0, 0.0), token_at(250.0, 0.0)];
        assert!(links(&tokens, 400.0).is_empty());
    }

    #[test]
    fn test_every_pair_once() {
        let tokens = [token_at(0.0, 0.0), token_at(10.0, 0.0), token_at(20.0, 0.0)];
        let links = links(&tokens, DEFAULT_LINK_DISTANCE);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (10.0, 0.0));
        assert_eq!(links[2].from, (10.0, 0.0));
        assert_eq!(links[2].to, (20.0, 0.0));
    }
}
