table! {
    categories (id) {
        id -> Int4,
        label -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    entries (id) {
        id -> Int4,
        entry -> Text,
        game_id -> Int4,
        player_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    game_categories (id) {
        id -> Int4,
        game_id -> Int4,
        category_id -> Int4,
    }
}

table! {
    games (id) {
        id -> Int4,
        title -> Varchar,
        description -> Varchar,
        designer -> Varchar,
        year_released -> Int4,
        num_players -> Int4,
        gameplay_length -> Int4,
        age -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    pictures (id) {
        id -> Int4,
        image -> Nullable<Varchar>,
        game_id -> Int4,
        player_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    players (id) {
        id -> Int4,
        user_id -> Int4,
        bio -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    ratings (id) {
        id -> Int4,
        rating -> Int4,
        game_id -> Int4,
        player_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    reviews (id) {
        id -> Int4,
        review -> Varchar,
        date -> Timestamptz,
        game_id -> Int4,
        player_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

joinable!(entries -> games (game_id));
joinable!(entries -> players (player_id));
joinable!(game_categories -> categories (category_id));
joinable!(game_categories -> games (game_id));
joinable!(pictures -> games (game_id));
joinable!(pictures -> players (player_id));
joinable!(players -> users (user_id));
joinable!(ratings -> games (game_id));
joinable!(ratings -> players (player_id));
joinable!(reviews -> games (game_id));
joinable!(reviews -> players (player_id));

allow_tables_to_appear_in_same_query!(
    categories,
    entries,
    game_categories,
    games,
    pictures,
    players,
    ratings,
    reviews,
    users,
);
