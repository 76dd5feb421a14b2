use super::*;

fn opened(page_count: usize, spread: usize) -> BookPresenter {
    let mut book = BookPresenter::new(page_count);
    assert!(book.open());
    book.complete_flip();
    for _ in 1..spread {
        assert!(book.next());
        book.complete_flip();
    }
    assert_eq!(book.state(), BookState::Open { spread });
    book
}

#[test]
fn opening_lands_on_the_first_spread() {
    let mut book = BookPresenter::new(11);
    assert_eq!(book.state(), BookState::Closed);
    assert!(book.open());
    assert!(book.is_flipping());
    assert!(!book.is_open());
    assert_eq!(book.current_spread(), 0);
    book.complete_flip();
    assert_eq!(book.state(), BookState::Open { spread: 1 });
    assert!(book.is_open());
}

#[test]
fn open_is_rejected_when_already_open_or_flipping() {
    let mut book = BookPresenter::new(11);
    assert!(book.open());
    assert!(!book.open());
    book.complete_flip();
    assert!(!book.open());
    assert_eq!(book.state(), BookState::Open { spread: 1 });
}

#[test]
fn navigation_is_inert_while_closed() {
    let mut book = BookPresenter::new(11);
    assert!(!book.next());
    assert!(!book.previous());
    assert_eq!(book.state(), BookState::Closed);
}

#[test]
fn next_stops_at_the_last_spread() {
    let mut book = opened(11, 5);
    assert_eq!(book.max_spread(), 5);
    assert!(!book.next());
    assert_eq!(book.state(), BookState::Open { spread: 5 });
}

#[test]
fn at_most_one_flip_in_flight() {
    let mut book = opened(11, 2);
    assert!(book.next());
    let mid_flight = book.state();
    assert!(!book.next());
    assert!(!book.previous());
    assert!(!book.open());
    assert_eq!(book.state(), mid_flight);
    book.complete_flip();
    assert_eq!(book.state(), BookState::Open { spread: 3 });
}

#[test]
fn complete_without_a_flip_is_a_no_op() {
    let mut book = BookPresenter::new(11);
    book.complete_flip();
    assert_eq!(book.state(), BookState::Closed);
    let mut book = opened(11, 2);
    book.complete_flip();
    assert_eq!(book.state(), BookState::Open { spread: 2 });
}

#[test]
fn previous_from_spread_k_closes_after_exactly_k_flips() {
    for k in 1..=5 {
        let mut book = opened(11, k);
        for _ in 0..k {
            assert!(book.previous());
            book.complete_flip();
        }
        assert_eq!(book.state(), BookState::Closed);
        assert!(!book.previous());
    }
}

#[test]
fn spread_stays_in_range_under_arbitrary_command_sequences() {
    for page_count in [2, 4, 11, 12, 24] {
        let mut book = BookPresenter::new(page_count);
        let max = book.max_spread();
        // A fixed pseudo-random walk over the command alphabet.
        let mut seed = 0x2545_f491u32;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match seed % 4 {
                0 => {
                    book.open();
                }
                1 => {
                    book.next();
                }
                2 => {
                    book.previous();
                }
                _ => book.complete_flip(),
            }
            assert!(book.current_spread() <= max);
            if let BookState::Flipping { from, to } = book.state() {
                assert!(from <= max && to <= max);
                assert_eq!(from.abs_diff(to), 1);
            }
        }
    }
}

#[test]
fn reference_walkthrough_lands_on_spread_two() {
    // spec scenario: N = 11, open; next; next; previous => spread 2.
    let mut book = BookPresenter::new(11);
    for command in ["open", "next", "next", "previous"] {
        let accepted = match command {
            "open" => book.open(),
            "next" => book.next(),
            _ => book.previous(),
        };
        assert!(accepted);
        book.complete_flip();
    }
    assert_eq!(book.state(), BookState::Open { spread: 2 });
    assert!(!book.is_flipping());
}

#[test]
fn minimal_book_round_trip() {
    // N = 4: open; next; previous; previous returns to Closed.
    let mut book = BookPresenter::new(4);
    assert_eq!(book.max_spread(), 2);
    assert!(book.open());
    book.complete_flip();
    assert!(book.next());
    book.complete_flip();
    assert!(book.previous());
    book.complete_flip();
    assert!(book.previous());
    book.complete_flip();
    assert_eq!(book.state(), BookState::Closed);
}

#[test]
fn closed_book_shows_exactly_the_cover() {
    for page_count in [2, 4, 11, 12] {
        let book = BookPresenter::new(page_count);
        let visible: Vec<usize> = (0..page_count)
            .filter(|&i| book.page_layout(i).is_some())
            .collect();
        assert_eq!(visible, [0]);
        assert_eq!(book.page_layout(0).unwrap().rotation, PageRotation::Deg0);
    }
}

#[test]
fn open_spread_shows_only_its_front_surface_on_the_right() {
    let book = opened(11, 3);
    for i in 0..11 {
        let layout = book.page_layout(i);
        if i == 6 {
            let layout = layout.expect("active front surface is drawn");
            assert_eq!(layout.rotation, PageRotation::Deg0);
            assert_eq!(layout.flip, None);
        } else {
            assert_eq!(layout, None, "surface {i} should not be drawn");
        }
    }
}

#[test]
fn forward_flip_animates_the_departing_leaf() {
    let mut book = opened(11, 2);
    assert!(book.next());
    let moving = book.page_layout(4).expect("moving page is forced visible");
    assert_eq!(moving.flip, Some(FlipDirection::Forward));
    assert_eq!(moving.rotation, PageRotation::Deg0);
    // Its back face is the renderer's job, not a layout entry.
    assert_eq!(book.page_layout(5), None);
}

#[test]
fn backward_flip_animates_the_returning_leaf() {
    let mut book = opened(11, 3);
    assert!(book.previous());
    let moving = book.page_layout(4).expect("returning page is forced visible");
    assert_eq!(moving.flip, Some(FlipDirection::Backward));
    assert_eq!(moving.rotation, PageRotation::Deg180);
    // The spread the reader is leaving keeps its face up underneath.
    let under = book.page_layout(6).expect("departing spread still drawn");
    assert_eq!(under.flip, None);
    assert!(moving.z > under.z);
}

#[test]
fn cover_animates_during_open_and_close() {
    let mut book = BookPresenter::new(11);
    assert!(book.open());
    let cover = book.page_layout(0).expect("cover visible while opening");
    assert_eq!(cover.flip, Some(FlipDirection::Forward));

    book.complete_flip();
    assert!(book.previous());
    let cover = book.page_layout(0).expect("cover visible while closing");
    assert_eq!(cover.flip, Some(FlipDirection::Backward));
    book.complete_flip();
    assert_eq!(book.state(), BookState::Closed);
}

#[test]
fn moving_page_is_elevated_above_the_resting_stack() {
    let mut book = opened(12, 3);
    assert!(book.next());
    let moving = book.page_layout(6).unwrap();
    for i in 0..12 {
        if i == 6 {
            continue;
        }
        if let Some(layout) = book.page_layout(i) {
            assert!(moving.z > layout.z);
        }
    }
}

#[test]
fn status_label_tracks_the_committed_spread() {
    let mut book = BookPresenter::new(11);
    assert_eq!(book.status_label(), "Closed");
    book.open();
    assert_eq!(book.status_label(), "Closed");
    book.complete_flip();
    assert_eq!(book.status_label(), "Spread 1 of 5");
    book.next();
    assert_eq!(book.status_label(), "Spread 1 of 5");
    book.complete_flip();
    assert_eq!(book.status_label(), "Spread 2 of 5");
}

#[test]
#[should_panic]
fn layout_of_an_out_of_range_surface_panics() {
    let book = BookPresenter::new(4);
    let _ = book.page_layout(4);
}
