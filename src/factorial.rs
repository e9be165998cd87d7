pub trait Factorial {
    fn get(&self, n: u8) -> u64;
}

#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u64 {
        assert!(n <= 20, "{n}! overflows");
        let mut product = 1u64;
        for i in 2..=n {
            product *= i as u64;
        }
        product
    }
}
