use rand::{
    Rng,
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
};

use super::formatter::UNKNOWNS;

struct Filter<Dist, Test> {
    dist: Dist,
    test: Test,
}
impl <T, Dist, Test> Distribution<T> for Filter<Dist, Test>
where
    Dist: Distribution<T>,
    Test: Fn(&T) -> bool,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        loop {
            let x = self.dist.sample(rng);
            if (self.test)(&x) {
                return x;
            }
        }
    }
}

/// Uniform in `[min, max]`, never zero. The range must hold a non-zero value.
pub fn gen_nonzero_i64<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let dist = Filter {
        dist: Uniform::new_inclusive(min, max),
        test: |x: &i64| *x != 0,
    };
    rng.sample(&dist)
}

/// `correct - 10 + U[0, 20)`
pub fn gen_nearby_i32<R: Rng + ?Sized>(rng: &mut R, around: i32) -> i32 {
    around - 10 + rng.gen_range(0..20)
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

pub fn random_unknown<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    UNKNOWNS[rng.gen_range(0..UNKNOWNS.len())]
}

pub fn shuffled<T, R: Rng + ?Sized>(rng: &mut R, mut values: Vec<T>) -> Vec<T> {
    values.shuffle(rng);
    values
}
