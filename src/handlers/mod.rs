pub mod freefem;
