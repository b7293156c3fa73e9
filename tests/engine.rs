//! End-to-end properties of the nine-patch engine.

use pretty_assertions::assert_eq;

use ninepatch::engine::{build, project, resolve, scan};
use ninepatch::{Bitmap, ChunkKind, Colour, NinePatchImage, Rect};

/// Build a bitmap from an ASCII picture.
///
/// `.` transparent, `#` black, `r` red, `w` white, `g` green.
fn picture(rows: &[&str]) -> Bitmap {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let pixels = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            '#' => Colour::BLACK,
            'r' => Colour::RED,
            'w' => Colour::WHITE,
            'g' => Colour::rgb(0, 255, 0),
            _ => Colour::TRANSPARENT,
        })
        .collect();
    Bitmap::new(width, height, pixels).unwrap()
}

fn button() -> Bitmap {
    picture(&[
        "..##.##..",
        ".wwwwwww.",
        "#wwwwwww.",
        "#wwwwwwwr",
        ".wwwwwwwr",
        ".wwwwwww.",
        "...rrr...",
    ])
}

#[test]
fn scenario_single_horizontal_tick() {
    let mut image = NinePatchImage::new(picture(&[
        ".###.",
        ".....",
        ".....",
        ".....",
        ".....",
    ]));

    let grid = image.chunk_grid();
    assert_eq!((grid.row_count(), grid.col_count()), (1, 1));
    let chunk = *grid.get(0, 0).unwrap();
    assert_eq!(chunk.kind, ChunkKind::Horizontal);
    assert_eq!(chunk.rect, Rect::new(0, 0, 3, 3));

    let p = *image.projections(9, 3).get(0, 0).unwrap();
    assert_eq!(p.src, Rect::new(0, 0, 3, 3));
    assert_eq!(p.dest, Rect::new(0, 0, 9, 3));
}

#[test]
fn button_grid_layout() {
    let mut image = NinePatchImage::new(button());
    insta::assert_snapshot!(image.chunk_grid().to_string(), @r###"
    FHFHF
    VBVBV
    FHFHF
    "###);
}

#[test]
fn identity_projection() {
    let mut image = NinePatchImage::new(button());
    let (w, h) = image.bitmap().interior_size();
    let projections = image.projections(w, h);
    assert!(projections.iter().all(|p| p.dest == p.src));
}

#[test]
fn partition_is_complete() {
    let bitmap = button();
    let ticks = scan(&bitmap);
    let grid = build(&bitmap, &ticks.top, &ticks.left);
    let interior = Rect::new(0, 0, 7, 5);

    let mut total = 0u64;
    for (_, _, a) in grid.iter() {
        total += a.rect.area();
        for (_, _, b) in grid.iter() {
            if a != b {
                assert!(!a.rect.intersects(&b.rect), "{} overlaps {}", a.rect, b.rect);
            }
        }
    }
    assert_eq!(total, interior.area());
}

#[test]
fn fixed_chunks_keep_their_size() {
    let bitmap = button();
    let ticks = scan(&bitmap);
    let grid = build(&bitmap, &ticks.top, &ticks.left);

    for (w, h) in [(0, 0), (3, 2), (7, 5), (40, 13), (1000, 1)] {
        let projections = project(&grid, w, h);
        for (r, c, chunk) in grid.iter().filter(|(_, _, c)| c.kind == ChunkKind::Fixed) {
            let dest = projections.get(r, c).unwrap().dest;
            assert_eq!((dest.width, dest.height), (chunk.rect.width, chunk.rect.height));
        }
    }
}

#[test]
fn extra_space_follows_source_widths() {
    // Elastic columns of width 1 and 3.
    let bitmap = picture(&[
        "..#.###.",
        "........",
        "........",
    ]);
    let ticks = scan(&bitmap);
    let grid = build(&bitmap, &ticks.top, &ticks.left);

    for dest_w in [6, 10, 17, 23, 101] {
        let projections = project(&grid, dest_w, 1);
        let narrow = projections.get(0, 1).unwrap();
        let wide = projections.get(0, 3).unwrap();

        let extra_narrow = narrow.dest.width as f64 - narrow.src.width as f64;
        let extra_wide = wide.dest.width as f64 - wide.src.width as f64;
        let total_extra = extra_narrow + extra_wide;

        assert!((extra_narrow - total_extra / 4.0).abs() <= 1.0);
        assert!((extra_wide - total_extra * 3.0 / 4.0).abs() <= 1.0);
        assert_eq!(projections.size().0, dest_w);
    }
}

#[test]
fn no_content_ticks_means_whole_interior() {
    let bitmap = picture(&[
        ".#...",
        "#....",
        ".....",
        ".....",
    ]);
    let ticks = scan(&bitmap);
    assert_eq!(
        resolve(&ticks.right, &ticks.bottom, bitmap.width(), bitmap.height()),
        Rect::new(0, 0, 3, 2)
    );
}

#[test]
fn button_content_area() {
    let mut image = NinePatchImage::new(button());
    assert_eq!(image.content_area(), Rect::new(2, 2, 3, 2));
}

#[test]
fn corruption_is_deterministic() {
    let bitmap = picture(&[
        ".##g##.",
        ".......",
        ".......",
        ".......",
    ]);

    for _ in 0..3 {
        let mut image = NinePatchImage::new(bitmap.clone());
        assert_eq!(image.chunk_grid().to_string(), "HXH");
        assert_eq!(image.corrupt_chunks(), vec![(0, 1)]);
    }
}

#[test]
fn recompute_tracks_each_mutation() {
    let mut image = NinePatchImage::new(picture(&[
        ".....",
        ".....",
        ".....",
        ".....",
        ".....",
    ]));
    assert_eq!(image.chunk_grid().to_string(), "F");

    image.set_patch(2, 0, Colour::BLACK).unwrap();
    assert_eq!(image.chunk_grid().to_string(), "FHF");

    image.set_patch(0, 3, Colour::BLACK).unwrap();
    assert_eq!(image.chunk_grid().to_string(), "FHF\nVBV");

    image.set_patch(2, 0, Colour::WHITE).unwrap();
    assert_eq!(image.chunk_grid().to_string(), "FXF\nVXV");

    image.erase(2, 0).unwrap();
    image.erase(0, 3).unwrap();
    assert_eq!(image.chunk_grid().to_string(), "F");
    assert!(image.corrupt_chunks().is_empty());
}

#[test]
fn degenerate_projection_shrinks_elastic_bands() {
    let mut image = NinePatchImage::new(button());
    let projections = image.projections(2, 1);

    // Fixed columns sum to 3, fixed rows to 3.
    assert_eq!(projections.size(), (3, 3));
    let middle = projections.get(1, 1).unwrap();
    assert_eq!((middle.dest.width, middle.dest.height), (0, 0));
}

#[test]
fn chunk_table_for_button() {
    let mut image = NinePatchImage::new(button());
    let table = image.chunk_table().unwrap();

    assert_eq!(table.x_divs, vec![1, 3, 4, 6]);
    assert_eq!(table.y_divs, vec![1, 3]);
    assert_eq!(table.colours.len(), 15);
    assert!(table.colours.iter().all(|&c| c == Colour::WHITE.to_argb()));
}

#[test]
fn chunk_table_json() {
    let mut image = NinePatchImage::new(picture(&[
        ".###.",
        ".....",
        ".....",
        ".....",
        ".....",
    ]));
    let table = image.chunk_table().unwrap();
    insta::assert_json_snapshot!(table, @r###"
    {
      "x_divs": [
        0,
        3
      ],
      "y_divs": [],
      "padding": {
        "left": 0,
        "top": 0,
        "right": 0,
        "bottom": 0
      },
      "colours": [
        0
      ]
    }
    "###);
}
