mod tests_loading;
mod tests_lookup;
mod tests_tree;
