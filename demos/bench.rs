use std::time::Instant;
use std::hint;
use oxlist::Allocator;
use oxlist::List;

const COUNT: usize = 10_000;

fn timeit<A, F>(f: F) -> f64 where F: FnOnce() -> A {
  let start = Instant::now();
  let _: A = hint::black_box(f());
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F, A, B>(name: &str, t: A, f: F) where F: Fn(A, usize) -> B {
  let elapsed = timeit(|| f(t, hint::black_box(COUNT)));
  print!("{:25} {:.3} ns\n", name, elapsed / (COUNT as f64));
}

// Every append walks the chain, so building is quadratic in `count`.

#[inline(never)]
fn bench_append<A: Allocator + Clone>(allocator: A, count: usize) -> List<u64, A> {
  let mut r = List::new_in(allocator);
  for i in 0 .. count {
    r.append(i as u64);
  }
  r
}

#[inline(never)]
fn bench_extend<A: Allocator + Clone>(allocator: A, count: usize) -> List<u64, A> {
  let mut r = List::new_in(allocator);
  r.extend(0 .. count as u64);
  r
}

#[inline(never)]
fn bench_map<A: Allocator + Clone>(list: &List<u64, A>, count: usize) -> List<u64, A> {
  let _ = count;
  list.map(|x| x.wrapping_mul(3))
}

#[inline(never)]
fn bench_remove_last<A: Allocator + Clone>(list: List<u64, A>, count: usize) -> u64 {
  let mut list = list;
  let mut s = 0;
  for _ in 0 .. count {
    s = s + list.remove_last().map_or(0, |x| *x.value());
  }
  s
}

fn main() {
  let bump = &bumpalo::Bump::new();

  run_bench("append (global)", oxlist::Global, bench_append);
  run_bench("append (bumpalo)", bump, bench_append);
  run_bench("extend (global)", oxlist::Global, bench_extend);
  run_bench("extend (bumpalo)", bump, bench_extend);

  let list = bench_extend(oxlist::Global, COUNT);
  run_bench("map (global)", &list, bench_map);
  run_bench("remove_last (global)", list, bench_remove_last);

  let list = bench_extend(bump, COUNT);
  run_bench("map (bumpalo)", &list, bench_map);
  run_bench("remove_last (bumpalo)", list, bench_remove_last);
}
