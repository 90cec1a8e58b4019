use sort_lab::instantiate_sort_tests;
use sort_lab::stable::bubblesort;

instantiate_sort_tests!(bubblesort::SortImpl);
