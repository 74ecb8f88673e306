pub mod riddles;
