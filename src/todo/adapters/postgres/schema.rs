//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo lists scoped to their owner.
    todo_lists (id) {
        /// List identifier.
        id -> Uuid,
        /// Owner identity of the creating caller.
        #[max_length = 255]
        owner -> Varchar,
        /// List title.
        #[max_length = 255]
        title -> Varchar,
        /// Insertion sequence used for stable ordering.
        position -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Todo items referencing their parent list.
    todo_items (id) {
        /// Item identifier.
        id -> Uuid,
        /// Parent list reference (cascades on list deletion).
        list_id -> Uuid,
        /// Owner identity of the creating caller.
        #[max_length = 255]
        owner -> Varchar,
        /// Item title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional item body.
        body -> Nullable<Text>,
        /// Insertion sequence used for stable ordering.
        position -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(todo_items -> todo_lists (list_id));
diesel::allow_tables_to_appear_in_same_query!(todo_lists, todo_items);
