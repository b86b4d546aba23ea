use num::{Num, ToPrimitive};

use crate::vectorizer::{term::TermFrequency, tfidf::TermWeights};

/// A sparse vector keyed by term
/// Absent terms have the implicit value zero.
pub trait TermVector<N>
where
    N: Num + Copy + ToPrimitive,
{
    /// value of `term`, zero if absent
    fn value(&self, term: &str) -> N;
    /// non-zero entries
    fn entries(&self) -> impl Iterator<Item = (&str, N)>;
    /// number of stored entries
    fn dim(&self) -> usize;
}

impl TermVector<u64> for TermFrequency {
    #[inline]
    fn value(&self, term: &str) -> u64 {
        self.term_count(term)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.iter()
    }

    fn dim(&self) -> usize {
        self.term_num()
    }
}

impl TermVector<f64> for TermWeights {
    #[inline]
    fn value(&self, term: &str) -> f64 {
        self.get(term).copied().unwrap_or(0.0)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().map(|(term, &w)| (term.as_str(), w))
    }

    fn dim(&self) -> usize {
        self.len()
    }
}

pub trait Compare<N>
where
    N: Num + Copy + ToPrimitive,
{
    /// dot product over the union of both term sets
    /// d(a, b) = Σ(a_t * b_t)
    fn dot<A, B>(a: &A, b: &B) -> f64
    where
        A: TermVector<N>,
        B: TermVector<N>;
    /// euclidean norm
    /// ||a|| = sqrt(Σ(a_t^2))
    fn norm<A>(a: &A) -> f64
    where
        A: TermVector<N>;
    /// cosine similarity
    /// cos(θ) = Σ(a_t * b_t) / (||a|| * ||b||)
    /// 0.0 when either norm is zero
    fn cosine_similarity<A, B>(a: &A, b: &B) -> f64
    where
        A: TermVector<N>,
        B: TermVector<N>;
}

#[derive(Debug)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + ToPrimitive,
{
    fn dot<A, B>(a: &A, b: &B) -> f64
    where
        A: TermVector<N>,
        B: TermVector<N>,
    {
        // terms missing on either side contribute zero, so walking the smaller side covers the union
        if a.dim() <= b.dim() {
            a.entries()
                .map(|(term, va)| to_f64(va) * to_f64(b.value(term)))
                .sum()
        } else {
            b.entries()
                .map(|(term, vb)| to_f64(a.value(term)) * to_f64(vb))
                .sum()
        }
    }

    fn norm<A>(a: &A) -> f64
    where
        A: TermVector<N>,
    {
        a.entries()
            .map(|(_, v)| {
                let v = to_f64(v);
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    fn cosine_similarity<A, B>(a: &A, b: &B) -> f64
    where
        A: TermVector<N>,
        B: TermVector<N>,
    {
        let norm_a = <Self as Compare<N>>::norm(a);
        let norm_b = <Self as Compare<N>>::norm(b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        <Self as Compare<N>>::dot(a, b) / (norm_a * norm_b)
    }
}

#[inline(always)]
fn to_f64<N: ToPrimitive>(v: N) -> f64 {
    v.to_f64().unwrap_or(0.0)
}
