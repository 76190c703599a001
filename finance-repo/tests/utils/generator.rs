use chrono::NaiveDate;
use fake::Fake;
use finance_repo::transaction_repo::{Category, NewTransaction, TransactionType};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

pub trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

/// Positive amounts with two decimal places.
struct FakeAmount;

impl Generator<Decimal> for FakeAmount {
    fn gen(&mut self) -> Decimal {
        Decimal::new((1..10_000_000i64).fake::<i64>(), 2)
    }
}

struct FakeDate;

impl Generator<NaiveDate> for FakeDate {
    fn gen(&mut self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            (2000..2030).fake::<i32>(),
            (1..13).fake::<u32>(),
            (1..29).fake::<u32>(),
        )
        .unwrap()
    }
}

pub struct NewTransactionGenerator {
    amnt_gen: Box<dyn Generator<Decimal>>,
    cat_gen: Box<dyn Generator<Category>>,
    type_gen: Box<dyn Generator<TransactionType>>,
    date_gen: Box<dyn Generator<NaiveDate>>,
}

impl NewTransactionGenerator {
    pub fn with_amounts(mut self, amounts: Vec<Decimal>) -> NewTransactionGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_types(mut self, types: Vec<TransactionType>) -> NewTransactionGenerator {
        self.type_gen = Predefined::boxed(types);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.amnt_gen.gen(),
            self.cat_gen.gen(),
            self.type_gen.gen(),
            self.date_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            amnt_gen: Box::new(FakeAmount),
            cat_gen: RandomSample::boxed(Category::ALL.to_vec()),
            type_gen: RandomSample::boxed(vec![TransactionType::Income, TransactionType::Expense]),
            date_gen: Box::new(FakeDate),
        }
    }
}
