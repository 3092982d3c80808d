//! Selection queries and movement over the top result

use crate::model::{ColumnKind, Item, ItemArgument, ItemKind, ResultVariant};

use super::NavigationController;

impl<C> NavigationController<C> {
    pub fn is_multi_search(&self) -> bool {
        matches!(self.top(), Some(ResultVariant::MultiColumn(_) | ResultVariant::DualList(_)))
    }

    /// Columns of the top result that have data, in display order
    pub fn active_columns(&self) -> Vec<ColumnKind> {
        match self.top() {
            Some(ResultVariant::MultiColumn(r)) => [
                (ColumnKind::Artists, r.artists.as_ref().map(Vec::len)),
                (ColumnKind::Albums, r.albums.as_ref().map(Vec::len)),
                (ColumnKind::Songs, r.songs.as_ref().map(Vec::len)),
            ]
            .into_iter()
            .filter(|(_, len)| len.unwrap_or(0) > 0)
            .map(|(column, _)| column)
            .collect(),
            Some(ResultVariant::DualList(r)) => [
                (ColumnKind::LibraryPlaylists, r.library.as_ref().map(Vec::len)),
                (ColumnKind::CatalogPlaylists, r.catalog.as_ref().map(Vec::len)),
            ]
            .into_iter()
            .filter(|(_, len)| len.unwrap_or(0) > 0)
            .map(|(column, _)| column)
            .collect(),
            _ => Vec::new(),
        }
    }

    pub fn multi_search_column_count(&self) -> usize {
        self.active_columns().len()
    }

    /// Map the dense selected column to the column it stands for.
    ///
    /// Past the last active column this is the last active column; `None`
    /// when no column has data.
    pub fn multi_search_column_type(&self) -> Option<ColumnKind> {
        let columns = self.active_columns();
        columns
            .get(self.selection.selected_column)
            .or(columns.last())
            .copied()
    }

    /// Items of one column of the top result
    pub fn column_items(&self, column: ColumnKind) -> Vec<Item> {
        match (self.top(), column) {
            (Some(ResultVariant::MultiColumn(r)), ColumnKind::Artists) => {
                wrap(r.artists.as_deref(), Item::Artist)
            }
            (Some(ResultVariant::MultiColumn(r)), ColumnKind::Albums) => wrap(r.albums.as_deref(), Item::Album),
            (Some(ResultVariant::MultiColumn(r)), ColumnKind::Songs) => wrap(r.songs.as_deref(), Item::Song),
            (Some(ResultVariant::DualList(r)), ColumnKind::LibraryPlaylists) => {
                wrap(r.library.as_deref(), Item::Playlist)
            }
            (Some(ResultVariant::DualList(r)), ColumnKind::CatalogPlaylists) => {
                wrap(r.catalog.as_deref(), Item::Playlist)
            }
            _ => Vec::new(),
        }
    }

    /// Number of navigable items in the current view
    pub fn current_item_count(&self) -> usize {
        let Some(result) = self.top() else {
            return 0;
        };
        match result {
            ResultVariant::Flat(r) => r.items.len(),
            ResultVariant::MultiColumn(_) | ResultVariant::DualList(_) => self
                .multi_search_column_type()
                .map(|column| self.column_items(column).len())
                .unwrap_or(0),
            ResultVariant::PlaylistDetail(d) => d.songs.len(),
            ResultVariant::AlbumDetail(d) => d.songs.len(),
            ResultVariant::ArtistDetail(d) => d.recent_albums.as_ref().map_or(0, Vec::len),
            ResultVariant::RecommendationDetail(d) => {
                d.albums.as_ref().map_or(0, Vec::len)
                    + d.stations.as_ref().map_or(0, Vec::len)
                    + d.playlists.as_ref().map_or(0, Vec::len)
            }
            ResultVariant::SongDetail(_) => 1,
            ResultVariant::Help => 0,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.current_item_count();
        if count > 0 && self.selection.selected_index < count - 1 {
            self.selection.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selection.selected_index = self.selection.selected_index.saturating_sub(1);
    }

    pub fn select_left(&mut self) {
        if self.selection.selected_column > 0 {
            self.selection.selected_column -= 1;
            let count = self.current_item_count();
            self.selection.clamp_index(count);
        }
    }

    pub fn select_right(&mut self) {
        let count = self.multi_search_column_count();
        if self.selection.selected_column + 1 < count {
            self.selection.selected_column += 1;
            let count = self.current_item_count();
            self.selection.clamp_index(count);
        }
    }

    pub fn reset_selection(&mut self) {
        self.selection.reset();
    }

    /// Whether activating the selected item drills into it rather than queueing it
    pub fn selected_item_should_open(&self) -> bool {
        let Some(result) = self.top() else {
            return false;
        };
        match result {
            ResultVariant::Flat(r) => match r.items.get(self.selection.selected_index) {
                Some(item) => matches!(item, Item::Artist(_) | Item::Recommendation(_)),
                None => r.item_kind == ItemKind::Artist,
            },
            ResultVariant::MultiColumn(_) => self.multi_search_column_type() == Some(ColumnKind::Artists),
            ResultVariant::DualList(_) => false,
            // stations have no detail view and are played instead
            ResultVariant::RecommendationDetail(_) => !matches!(
                self.item_for_argument(self.selected_item_argument()),
                Some(Item::Station(_))
            ),
            ResultVariant::SongDetail(_)
            | ResultVariant::AlbumDetail(_)
            | ResultVariant::ArtistDetail(_)
            | ResultVariant::PlaylistDetail(_)
            | ResultVariant::Help => false,
        }
    }

    /// Convert a flat index into the argument addressing it in the current view
    pub fn argument_for_index(&self, index: usize) -> ItemArgument {
        match self.top() {
            Some(ResultVariant::AlbumDetail(_)) => ItemArgument::prefixed('s', index),
            Some(ResultVariant::ArtistDetail(_)) => ItemArgument::prefixed('a', index),
            Some(ResultVariant::RecommendationDetail(d)) => {
                let albums = d.albums.as_ref().map_or(0, Vec::len);
                let stations = d.stations.as_ref().map_or(0, Vec::len);
                if index < albums {
                    ItemArgument::prefixed('a', index)
                } else if index < albums + stations {
                    ItemArgument::prefixed('s', index - albums)
                } else {
                    ItemArgument::prefixed('p', index - albums - stations)
                }
            }
            _ => ItemArgument::plain(index),
        }
    }

    pub fn selected_item_argument(&self) -> ItemArgument {
        self.argument_for_index(self.selection.selected_index)
    }

    /// Resolve an item argument against the top result
    pub fn item_for_argument(&self, argument: ItemArgument) -> Option<Item> {
        let ItemArgument::Index { prefix, index } = argument else {
            return None;
        };
        match (self.top()?, prefix) {
            (ResultVariant::Flat(r), None) => r.items.get(index),
            (ResultVariant::MultiColumn(_) | ResultVariant::DualList(_), None) => {
                let column = self.multi_search_column_type()?;
                self.column_items(column).into_iter().nth(index)
            }
            (ResultVariant::SongDetail(d), None) if index == 0 => Some(Item::Song(d.song.clone())),
            (ResultVariant::SongDetail(d), Some('w')) => nth(d.artists.as_deref(), index, Item::Artist),
            (ResultVariant::SongDetail(d), Some('a')) if index == 0 => d.album.clone().map(Item::Album),
            (ResultVariant::AlbumDetail(d), None | Some('s')) => nth(Some(d.songs.as_slice()), index, Item::Song),
            (ResultVariant::AlbumDetail(d), Some('w')) => nth(d.artists.as_deref(), index, Item::Artist),
            (ResultVariant::ArtistDetail(d), None | Some('a')) => nth(d.recent_albums.as_deref(), index, Item::Album),
            (ResultVariant::ArtistDetail(d), Some('t')) => nth(d.top_songs.as_deref(), index, Item::Song),
            (ResultVariant::PlaylistDetail(d), None | Some('s')) => nth(Some(d.songs.as_slice()), index, Item::Song),
            // always maps to a prefixed argument
            (ResultVariant::RecommendationDetail(_), None) => self.item_for_argument(self.argument_for_index(index)),
            (ResultVariant::RecommendationDetail(d), Some('a')) => nth(d.albums.as_deref(), index, Item::Album),
            (ResultVariant::RecommendationDetail(d), Some('s')) => nth(d.stations.as_deref(), index, Item::Station),
            (ResultVariant::RecommendationDetail(d), Some('p')) => nth(d.playlists.as_deref(), index, Item::Playlist),
            _ => None,
        }
    }

    /// Everything `addToQueue a` acts on in the current view
    pub fn navigable_items(&self) -> Vec<Item> {
        let Some(result) = self.top() else {
            return Vec::new();
        };
        match result {
            ResultVariant::Flat(r) => r.items.items(),
            ResultVariant::MultiColumn(_) | ResultVariant::DualList(_) => self
                .multi_search_column_type()
                .map(|column| self.column_items(column))
                .unwrap_or_default(),
            ResultVariant::SongDetail(d) => vec![Item::Song(d.song.clone())],
            ResultVariant::AlbumDetail(d) => wrap(Some(d.songs.as_slice()), Item::Song),
            ResultVariant::ArtistDetail(d) => wrap(d.recent_albums.as_deref(), Item::Album),
            ResultVariant::PlaylistDetail(d) => wrap(Some(d.songs.as_slice()), Item::Song),
            ResultVariant::RecommendationDetail(d) => {
                let mut items = wrap(d.albums.as_deref(), Item::Album);
                items.extend(wrap(d.stations.as_deref(), Item::Station));
                items.extend(wrap(d.playlists.as_deref(), Item::Playlist));
                items
            }
            ResultVariant::Help => Vec::new(),
        }
    }
}

fn wrap<T: Clone>(items: Option<&[T]>, into: fn(T) -> Item) -> Vec<Item> {
    items.unwrap_or_default().iter().cloned().map(into).collect()
}

fn nth<T: Clone>(items: Option<&[T]>, index: usize, into: fn(T) -> Item) -> Option<Item> {
    items?.get(index).cloned().map(into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchKind;
    use crate::testing::{MockCatalog, fixtures};

    fn with_top(result: ResultVariant) -> NavigationController<MockCatalog> {
        let mut nav = NavigationController::new(MockCatalog::empty());
        nav.history.push(result, true);
        nav
    }

    #[test]
    fn recommendation_indices_span_albums_stations_playlists() {
        let nav = with_top(fixtures::recommendation_detail(2, 3, 1));
        let args: Vec<String> = [0, 1, 2, 4, 5].iter().map(|i| nav.argument_for_index(*i).to_string()).collect();
        assert_eq!(args, ["a0", "a1", "s0", "s2", "p0"]);
        assert_eq!(nav.current_item_count(), 6);
    }

    #[test]
    fn select_next_stops_at_the_last_item_of_every_view() {
        let cases = [
            (fixtures::flat_songs(3), 3),
            (fixtures::multi_column(0, 3, 5), 3),
            (fixtures::dual_list(2, 4), 2),
            (fixtures::album_detail(4), 4),
            (fixtures::artist_detail(2), 2),
            (fixtures::playlist_detail(), 3),
            (fixtures::recommendation_detail(2, 3, 1), 6),
            (fixtures::song_detail(), 1),
            (ResultVariant::Help, 0),
        ];
        for (result, expected) in cases {
            let mut nav = with_top(result);
            assert_eq!(nav.current_item_count(), expected);
            for _ in 0..expected + 3 {
                nav.select_next();
            }
            assert_eq!(nav.selection().selected_index, expected.saturating_sub(1));
            nav.select_previous();
            assert_eq!(nav.selection().selected_index, expected.saturating_sub(2));
        }
    }

    #[test]
    fn detail_pages_use_their_prefixes() {
        let nav = with_top(fixtures::album_detail(3));
        assert_eq!(nav.argument_for_index(2).to_string(), "s2");
        let nav = with_top(fixtures::artist_detail(2));
        assert_eq!(nav.argument_for_index(1).to_string(), "a1");
        let nav = with_top(fixtures::playlist_detail());
        assert_eq!(nav.argument_for_index(1).to_string(), "1");
        let nav = with_top(fixtures::flat_songs(4));
        assert_eq!(nav.argument_for_index(3).to_string(), "3");
    }

    #[test]
    fn select_right_skips_empty_columns_and_clamps_the_index() {
        let mut nav = with_top(fixtures::multi_column(0, 3, 5));
        assert_eq!(nav.multi_search_column_count(), 2);
        assert_eq!(nav.multi_search_column_type(), Some(ColumnKind::Albums));

        nav.selection.selected_index = 2;
        nav.select_right();
        assert_eq!(nav.selection.selected_column, 1);
        assert_eq!(nav.multi_search_column_type(), Some(ColumnKind::Songs));
        assert_eq!(nav.selection.selected_index, 2);

        nav.select_right();
        assert_eq!(nav.selection.selected_column, 1);
    }

    #[test]
    fn select_left_clamps_into_a_shorter_column() {
        let mut nav = with_top(fixtures::multi_column(0, 3, 5));
        nav.select_right();
        nav.selection.selected_index = 4;
        nav.select_left();
        assert_eq!(nav.selection.selected_column, 0);
        assert_eq!(nav.selection.selected_index, 2);
        nav.select_left();
        assert_eq!(nav.selection.selected_column, 0);
    }

    #[test]
    fn selection_stays_at_zero_when_empty() {
        let mut nav = with_top(ResultVariant::Help);
        nav.select_next();
        nav.select_previous();
        assert_eq!(nav.selection.selected_index, 0);

        let mut nav = NavigationController::new(MockCatalog::empty());
        nav.select_next();
        assert_eq!(nav.selection.selected_index, 0);
        assert_eq!(nav.current_item_count(), 0);
    }

    #[test]
    fn select_next_stops_at_the_last_item() {
        let mut nav = with_top(fixtures::flat_songs(3));
        for _ in 0..10 {
            nav.select_next();
        }
        assert_eq!(nav.selection.selected_index, 2);
        for _ in 0..10 {
            nav.select_previous();
        }
        assert_eq!(nav.selection.selected_index, 0);
    }

    #[test]
    fn should_open_follows_the_selected_kind() {
        let nav = with_top(fixtures::flat(ItemKind::Artist, SearchKind::CatalogSearch, vec![
            Item::Artist(fixtures::artist("ar1", "Coldplay")),
        ]));
        assert!(nav.selected_item_should_open());

        let nav = with_top(fixtures::flat_songs(2));
        assert!(!nav.selected_item_should_open());

        let mut nav = with_top(fixtures::multi_column(2, 3, 5));
        assert!(nav.selected_item_should_open());
        nav.select_right();
        assert!(!nav.selected_item_should_open());

        let mut nav = with_top(fixtures::recommendation_detail(1, 1, 1));
        assert!(nav.selected_item_should_open());
        nav.selection.selected_index = 1;
        assert!(!nav.selected_item_should_open());

        assert!(!with_top(fixtures::album_detail(2)).selected_item_should_open());
        assert!(!with_top(ResultVariant::Help).selected_item_should_open());
    }

    #[test]
    fn items_resolve_from_prefixed_arguments() {
        let nav = with_top(fixtures::recommendation_detail(2, 3, 1));
        assert!(matches!(nav.item_for_argument(ItemArgument::prefixed('s', 2)), Some(Item::Station(_))));
        assert!(matches!(nav.item_for_argument(ItemArgument::plain(5)), Some(Item::Playlist(_))));
        assert!(nav.item_for_argument(ItemArgument::prefixed('p', 1)).is_none());
        assert!(nav.item_for_argument(ItemArgument::All).is_none());

        let nav = with_top(fixtures::multi_column(0, 3, 5));
        let Some(Item::Album(album)) = nav.item_for_argument(ItemArgument::plain(1)) else {
            panic!("expected an album from the first active column");
        };
        assert_eq!(album.id, "al1");
    }

    #[test]
    fn navigable_items_follow_the_active_column() {
        let mut nav = with_top(fixtures::multi_column(1, 3, 5));
        assert_eq!(nav.navigable_items().len(), 1);
        nav.select_right();
        assert_eq!(nav.navigable_items().len(), 3);
        let nav = with_top(fixtures::recommendation_detail(2, 3, 1));
        assert_eq!(nav.navigable_items().len(), 6);
    }
}
