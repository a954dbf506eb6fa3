use std::io::Cursor;

use rosu_beatmap::{Beatmap, Color4, ParseError};

fn parse(text: &str) -> Beatmap {
    Beatmap::parse(Cursor::new(text), "test.osu").unwrap()
}

#[test]
fn metadata_only_document_keeps_defaults() {
    let map = parse("[Metadata]\nVersion:Expert\n");

    assert_eq!(map.name(), "Expert");
    assert_eq!(map.audio_filename(), "audio.mp3");
    assert_eq!(map.id(), 0);
    assert!(map.bookmarks().is_empty());
    assert_eq!(map.hp_drain_rate(), 5.0);
    assert_eq!(map.circle_size(), 5.0);
    assert_eq!(map.overall_difficulty(), 5.0);
    assert_eq!(map.approach_rate(), 5.0);
    assert_eq!(map.slider_multiplier(), 1.4);
    assert_eq!(map.slider_tick_rate(), 1.0);
    assert_eq!(map.background(), "");
    assert!(map.breaks().is_empty());
    assert_eq!(map.combo_colors().len(), 4);
    assert_eq!(map.combo_colors()[0], Color4::from_rgb(255, 192, 0));
    assert!(map.hit_objects().is_empty());
    assert!(map.control_points().is_empty());
}

#[test]
fn parses_all_sections() {
    let map = parse(
        "\
osu file format v14

[General]
AudioFilename: song.ogg
AudioLeadIn: 0

[Editor]
Bookmarks: 1000,2000,3000
DistanceSpacing: 1.2

[Metadata]
Title:Some Song
Version:Hard
BeatmapID:1376486

[Difficulty]
HPDrainRate:6.5
CircleSize:4
OverallDifficulty:8
ApproachRate:9.2
SliderMultiplier:1.8
SliderTickRate:2

[Events]
//Background and Video events
0,0,\"bg.jpg\",0,0
 Sprite,Foreground,Centre,\"sb/pixel.png\",320,240
2,93303,118820

[TimingPoints]
0,350,4,1,0,100,1,0
10000,-50,4,2,1,60,0,1

[Colours]
Combo1 : 255,0,0
Combo2 : 0,255,0

[HitObjects]
256,192,1000,5,0
100,100,2000,1,0
",
    );

    assert_eq!(map.audio_filename(), "song.ogg");
    assert_eq!(map.bookmarks(), [1000, 2000, 3000]);
    assert_eq!(map.name(), "Hard");
    assert_eq!(map.id(), 1_376_486);
    assert_eq!(map.hp_drain_rate(), 6.5);
    assert_eq!(map.circle_size(), 4.0);
    assert_eq!(map.overall_difficulty(), 8.0);
    assert_eq!(map.approach_rate(), 9.2);
    assert_eq!(map.slider_multiplier(), 1.8);
    assert_eq!(map.slider_tick_rate(), 2.0);
    assert_eq!(map.background(), "bg.jpg");
    assert_eq!(map.breaks().len(), 1);
    assert_eq!(map.breaks()[0].start_time, 93303.0);
    assert_eq!(map.breaks()[0].end_time, 118820.0);
    assert_eq!(map.combo_colors().len(), 2);
    assert_eq!(map.control_points().len(), 2);
    assert_eq!(map.hit_objects().len(), 2);
}

#[test]
fn colours_section_replaces_default_palette() {
    let map = parse("[Colours]\nCombo1 : 255,0,0\nCombo2 : 0,255,0\n");

    assert_eq!(
        map.combo_colors(),
        [Color4::from_rgb(255, 0, 0), Color4::from_rgb(0, 255, 0)]
    );
}

#[test]
fn colours_section_ignores_non_combo_keys() {
    let map = parse("[Colours]\nCombo1 : 10,20,30\nSliderBorder : 255,255,255\n");

    assert_eq!(map.combo_colors(), [Color4::from_rgb(10, 20, 30)]);
}

#[test]
fn empty_bookmark_value_yields_no_bookmarks() {
    let map = parse("[Editor]\nBookmarks:\n");

    assert!(map.bookmarks().is_empty());

    let map = parse("[Editor]\nBookmarks:100,200,\n");

    assert_eq!(map.bookmarks(), [100, 200]);
}

#[test]
fn control_points_are_sorted_stably_by_offset() {
    let map = parse(
        "\
[TimingPoints]
2000,400,4,1,0,100,1
0,500,4,1,0,100,1
1000,350,4,1,0,100,1
1000,-50,4,1,0,100,0
",
    );

    let offsets: Vec<_> = map.control_points().iter().map(|p| p.offset).collect();

    assert_eq!(offsets, [0.0, 1000.0, 1000.0, 2000.0]);
    // the uninherited point at 1000 precedes the inherited one at the
    // same offset, as in the source
    assert!(!map.control_points()[1].inherited);
    assert!(map.control_points()[2].inherited);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let map = parse("[Metadata]\nVersion:First\nVersion:Second\n");

    assert_eq!(map.name(), "Second");
}

#[test]
fn unknown_sections_are_skipped() {
    let map = parse("[Fonts]\nwhatever nonsense\n[Metadata]\nVersion:Ok\n");

    assert_eq!(map.name(), "Ok");
}

#[test]
fn lines_before_first_section_are_discarded() {
    let map = parse("osu file format v14\njunk\n[Metadata]\nVersion:Ok\n");

    assert_eq!(map.name(), "Ok");
}

#[test]
fn background_keeps_unquoted_paths() {
    let map = parse("[Events]\n0,0,bg.png,0,0\n");

    assert_eq!(map.background(), "bg.png");
}

#[test]
fn combo_stamps_are_assigned_on_load() {
    let map = parse(
        "\
[HitObjects]
256,192,1000,1,0
256,192,2000,5,0
256,192,3000,1,0
",
    );

    let combo: Vec<_> = map.hit_objects().iter().map(|h| h.combo_index).collect();
    let color: Vec<_> = map.hit_objects().iter().map(|h| h.color_index).collect();

    assert_eq!(combo, [1, 1, 2]);
    assert_eq!(color, [1, 2, 2]);
    assert_eq!(map.hit_objects()[0].color, map.combo_colors()[1]);
    assert!(map.hit_objects()[0].new_combo());
}

#[test]
fn failures_are_wrapped_with_the_display_name() {
    let err = Beatmap::parse(
        Cursor::new("[Difficulty]\nCircleSize:not a number\n"),
        "songs/Artist - Title [Hard].osu",
    )
    .unwrap_err();

    match err {
        ParseError::Load { ref name, .. } => assert_eq!(name, "Artist - Title [Hard]"),
        _ => panic!("expected ParseError::Load, got {err:?}"),
    }

    assert_eq!(
        err.to_string(),
        "failed to load beatmap `Artist - Title [Hard]`"
    );
}

#[test]
fn malformed_section_data_aborts_the_load() {
    assert!(Beatmap::parse(Cursor::new("[TimingPoints]\n0\n"), "x.osu").is_err());
    assert!(Beatmap::parse(Cursor::new("[HitObjects]\n0,0,12,4,0\n"), "x.osu").is_err());
    assert!(Beatmap::parse(Cursor::new("[Metadata]\nno colon here\n"), "x.osu").is_err());
}
