use rand::Rng;

pub const STUDENT_ID_MIN: i32 = 1000;
pub const STUDENT_ID_MAX: i32 = 9999;

/// Draws a four digit student number. Collisions with existing students are
/// possible and not checked.
pub fn generate_student_id() -> i32 {
    rand::thread_rng().gen_range(STUDENT_ID_MIN..=STUDENT_ID_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_in_range() {
        for _ in 0..1_000 {
            let id = generate_student_id();
            assert!((STUDENT_ID_MIN..=STUDENT_ID_MAX).contains(&id));
        }
    }
}
