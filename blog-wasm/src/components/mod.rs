pub(crate) mod posts_list;
