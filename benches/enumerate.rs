use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_backgammon::core::{Board, Color, Dice};
use rust_backgammon::rules::legal_moves;

/// Midgame-ish positions from a fixed playout.
fn gen_positions(n: usize) -> Vec<(Board, Color)> {
    let mut out = Vec::with_capacity(n);
    let mut board = Board::new();
    let mut color = Color::Black;
    let mut x: u64 = 0xA5A5_A5A5_0123_4567;
    let rolls: Vec<Dice> = Dice::all().collect();

    while out.len() < n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let dice = rolls[(x >> 33) as usize % rolls.len()];
        let moves = legal_moves(color, dice, &board);
        board = moves[(x >> 17) as usize % moves.len()].current_board().clone();
        color = color.opponent();
        if board.is_game_over() {
            board = Board::new();
        }
        out.push((board.clone(), color));
    }
    out
}

fn bench_opening(c: &mut Criterion) {
    let board = Board::new();
    let mut g = c.benchmark_group("legal_moves_opening");
    for dice in [Dice::new(6, 5), Dice::new(3, 3), Dice::new(6, 6)] {
        g.bench_with_input(BenchmarkId::from_parameter(dice), &dice, |b, &dice| {
            b.iter(|| legal_moves(black_box(Color::White), black_box(dice), black_box(&board)))
        });
    }
    g.finish();
}

fn bench_playout_positions(c: &mut Criterion) {
    let mut g = c.benchmark_group("legal_moves_playout");
    for &n in &[64usize, 512] {
        let positions = gen_positions(n);
        g.bench_with_input(BenchmarkId::new("all_rolls", n), &positions, |b, positions| {
            b.iter(|| {
                for (board, color) in positions {
                    for dice in [Dice::new(2, 1), Dice::new(5, 5)] {
                        black_box(legal_moves(*color, dice, board));
                    }
                }
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_opening, bench_playout_positions);
criterion_main!(benches);
