pub mod award_search;
