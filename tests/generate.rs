//! End-to-end generation through PNG files.

use artgen::{
    generate, seeded_rng, synthesize, synthesize_noise, write_png, ArtConfig, ChannelTrees, Expr,
    Grammar, TreeBuilder,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn small_config(width: u32, height: u32) -> ArtConfig {
    ArtConfig {
        width,
        height,
        ..Default::default()
    }
}

#[test]
fn test_single_pixel_image() {
    let art = generate(&small_config(1, 1), &mut seeded_rng(1)).unwrap();
    assert_eq!(art.grid.len(), 1);

    let dir = tempdir().unwrap();
    let path = dir.path().join("one.png");
    write_png(&art.grid, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!((img.width(), img.height()), (1, 1));
    assert_eq!(img.get_pixel(0, 0).0, art.grid.get(0, 0).unwrap().to_rgb8());
}

#[test]
fn test_image_matches_grid() {
    let art = generate(&small_config(23, 11), &mut seeded_rng(8)).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("art.png");
    write_png(&art.grid, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!((img.width(), img.height()), (23, 11));
    for y in 0..11 {
        for x in 0..23 {
            assert_eq!(img.get_pixel(x, y).0, art.grid.get(x, y).unwrap().to_rgb8());
        }
    }
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempdir().unwrap();
    let config = small_config(32, 24);

    let mut bytes = Vec::new();
    for name in ["a.png", "b.png"] {
        let art = generate(&config, &mut seeded_rng(2024)).unwrap();
        let path = dir.path().join(name);
        write_png(&art.grid, &path).unwrap();
        bytes.push(std::fs::read(&path).unwrap());
    }

    assert!(bytes[0] == bytes[1]);
}

#[test]
fn test_grammars_share_trees_without_powers() {
    // A tree without squared or cubed nodes consumes the same draws under
    // both grammars.
    let mut checked = 0;
    for seed in 0..200 {
        let reference = TreeBuilder::new(Grammar::Reference).build(&mut seeded_rng(seed), 3, 3);
        let text = reference.to_string();
        if text.contains("squared") || text.contains("cubed") {
            continue;
        }

        let unary = TreeBuilder::new(Grammar::Unary).build(&mut seeded_rng(seed), 3, 3);
        assert_eq!(reference, unary);
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn test_parsed_tree_synthesizes_like_built_tree() {
    let built = TreeBuilder::default().build(&mut seeded_rng(77), 4, 6);
    let parsed: Expr = built.to_string().parse().unwrap();

    let trees = |e: &Expr| ChannelTrees {
        red: e.clone(),
        green: e.clone(),
        blue: e.clone(),
    };
    assert_eq!(
        synthesize(&trees(&built), 9, 9).unwrap(),
        synthesize(&trees(&parsed), 9, 9).unwrap()
    );
}

#[test]
fn test_noise_image() {
    let grid = synthesize_noise(&mut seeded_rng(3), 16, 16);

    let dir = tempdir().unwrap();
    let path = dir.path().join("noise.png");
    write_png(&grid, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!((img.width(), img.height()), (16, 16));
    assert!(grid.pixels().iter().all(|c| c.in_gamut()));
}
