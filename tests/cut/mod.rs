pub mod test_cut;
