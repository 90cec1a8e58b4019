use sort_lab::instantiate_sort_tests;
use sort_lab::unstable::quicksort;

instantiate_sort_tests!(quicksort::SortImpl);

#[test]
fn sorted_leaves_input_untouched() {
    let input = vec![9, 1, 8, 2, -7, 2];

    let result = quicksort::sorted(&input);

    assert_eq!(input, [9, 1, 8, 2, -7, 2]);
    assert_eq!(result, [-7, 1, 2, 2, 8, 9]);
}
