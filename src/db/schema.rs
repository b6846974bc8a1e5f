diesel::table! {
    categories (name) {
        name -> Text,
    }
}

diesel::table! {
    products (id) {
        id -> Text,
        name -> Text,
        price -> BigInt,
        category_name -> Text,
    }
}

diesel::joinable!(products -> categories (category_name));

diesel::allow_tables_to_appear_in_same_query!(categories, products);
