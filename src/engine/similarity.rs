use std::collections::HashSet;
use std::hash::Hash;


/// Cosine similarity of two sets viewed as binary vectors: `|a ∩ b| / sqrt(|a| * |b|)`.
pub fn set_similarity<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|tag| large.contains(*tag)).count();

    shared as f64 / ((a.len() * b.len()) as f64).sqrt()
}
