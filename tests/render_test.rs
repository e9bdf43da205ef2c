//! Integration tests for scene composition into the terminal framebuffer

use tui_raycaster::core::{
    AnimationLengths, FrameContext, Layer, Player, Session, Texture, TextureSet, Tuning,
    WeaponAnimator, WorldMap,
};
use tui_raycaster::term::{FrameBuffer, MenuView, SceneView, HALF_BLOCK};
use tui_raycaster::types::{Rgb, FLOOR_FALLBACK, FOV, SKY_COLOR, WALL_FALLBACK};

fn session() -> Session {
    Session::new(
        WorldMap::builtin().unwrap(),
        AnimationLengths::default(),
        Tuning::default(),
        3,
    )
}

#[test]
fn test_every_cell_is_a_half_block_of_two_pixels() {
    let mut s = session();
    let textures = TextureSet::default();
    let mut fb = FrameBuffer::new(48, 20);
    SceneView::new(0).render_session(&mut s, &textures, &mut fb);

    let (w, h) = SceneView::logical_size(&fb);
    let ctx = s.prepare_frame(&textures, w, h, 0);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, HALF_BLOCK);
            assert_eq!(cell.style.fg, ctx.pixel(x as usize, 2 * y as usize));
            assert_eq!(cell.style.bg, ctx.pixel(x as usize, 2 * y as usize + 1));
        }
    }
}

#[test]
fn test_missing_textures_render_with_fallback_colours() {
    let mut s = session();
    let textures = TextureSet::default();
    let mut fb = FrameBuffer::new(40, 30);
    SceneView::default().render_session(&mut s, &textures, &mut fb);

    let colours: Vec<Rgb> = fb
        .cells()
        .iter()
        .flat_map(|c| [c.style.fg, c.style.bg])
        .collect();
    assert!(colours.contains(&SKY_COLOR));
    assert!(colours.contains(&WALL_FALLBACK));
    assert!(colours.contains(&FLOOR_FALLBACK));
}

#[test]
fn test_npc_in_view_is_drawn_over_the_floor() {
    let map = WorldMap::from_rows(
        7,
        9,
        &["#######", "#.....#", "#.....#", "#.....#", "#.....#", "#.....#", "#.....#", "#.....#", "#######"],
    )
    .unwrap()
    .map;
    let textures = TextureSet {
        npc_idle: Texture::solid(8, 8, Rgb::new(5, 6, 7)),
        ..Default::default()
    };
    let player = Player::new(3.5, 1.5, 0.0, FOV);
    let mut npc = tui_raycaster::core::Npc::new(3.5, 4.5);
    npc.distance = npc.distance_to(player.x, player.y);

    let ctx = FrameContext::new(&map, player, &[npc], WeaponAnimator::new(), &textures, 60, 60, 0);
    assert_eq!(ctx.billboards().len(), 1);
    assert_eq!(ctx.resolve(30, 30), (Layer::Sprite, Rgb::new(5, 6, 7)));
    // Far outside the billboard the wall shows through.
    assert_eq!(ctx.resolve(1, 30).0, Layer::Wall);
}

#[test]
fn test_menu_renders_all_entries() {
    let mut fb = FrameBuffer::new(80, 24);
    MenuView.render_into(0, &mut fb);
    let text: String = fb.cells().iter().map(|c| c.ch).collect();
    for label in ["PLAY GAME", "CONTROLS", "EXIT GAME"] {
        assert!(text.contains(label), "missing {label}");
    }
}
