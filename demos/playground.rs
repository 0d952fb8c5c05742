use oxlist::List;
use oxlist::Node;

fn main() {
  let mut list = List::new();

  for i in 1 ..= 6 {
    list.append(i);
  }

  println!("count      {}", list.count());
  println!("first      {:?}", list.first().map(Node::value));
  println!("last       {:?}", list.last().map(Node::value));
  println!("[2]        {:?}", list.get(2).map(Node::value));
  println!("removed    {:?}", list.remove_last().map(|x| *x.value()));

  list.append(100);

  let strings = list.map(|x| x.to_string());

  println!("list       {}", list);
  println!("mapped     {:?}", strings);

  for node in &list {
    println!("{}", node);
  }
}
