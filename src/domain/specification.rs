// src/domain/specification.rs
pub trait Specification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}
