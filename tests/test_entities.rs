use fight_kokaton::entities::*;

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 40);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 60);
    assert_eq!(r.center_x(), 25);
    assert_eq!(r.center_y(), 40);
}

#[test]
fn rect_from_center_round_trips() {
    let r = Rect::from_center(100, 200, 40, 60);
    assert_eq!(r.x, 80);
    assert_eq!(r.y, 170);
    assert_eq!(r.center_x(), 100);
    assert_eq!(r.center_y(), 200);
}

#[test]
fn rect_moved_shifts_position_only() {
    let r = Rect::new(10, 20, 30, 40);
    let m = r.moved(5, -5);
    assert_eq!(m, Rect::new(15, 15, 30, 40));
    assert_eq!(r, Rect::new(10, 20, 30, 40)); // original untouched
}

#[test]
fn rect_overlap_detection() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
    assert!(!a.overlaps(&Rect::new(20, 20, 10, 10)));
}

#[test]
fn rect_edge_contact_is_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    // Sharing an edge or a corner does not collide
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    assert!(!a.overlaps(&Rect::new(10, 10, 10, 10)));
}

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(PlayerPose::Normal, PlayerPose::Normal);
    assert_ne!(PlayerPose::Hit, PlayerPose::Defeated);
    assert_eq!(BombColor::Red, BombColor::Red);
    assert_ne!(BombColor::Blue, BombColor::Cyan);

    // Clone must produce an equal value
    let pose = PlayerPose::Hit;
    assert_eq!(pose.clone(), PlayerPose::Hit);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            rect: Rect::from_center(900, 400, 80, 80),
            dire: (5, 0),
            pose: PlayerPose::Normal,
        },
        bombs: Vec::new(),
        beam: None,
        explosions: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect = cloned.player.rect.moved(50, 50);
    cloned.score = 999;
    cloned.bombs.push(Bomb {
        rect: Rect::from_center(100, 100, 20, 20),
        vx: 5,
        vy: -5,
        radius: 10,
        color: BombColor::Green,
    });

    assert_eq!(original.player.rect.center_x(), 900);
    assert_eq!(original.score, 0);
    assert!(original.bombs.is_empty());
}
