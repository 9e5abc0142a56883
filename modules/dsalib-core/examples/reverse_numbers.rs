use dsalib_core_rs::collections::stack::DynamicStack;

fn main() {
  let numbers = [1, 2, 3, 4, 5];
  let mut stack = DynamicStack::new(0).expect("default stack allocation");

  for number in numbers {
    stack.push(number).expect("push onto growable stack");
  }

  let mut reversed = Vec::with_capacity(numbers.len());
  while let Ok(number) = stack.pop() {
    reversed.push(number);
  }

  println!("original: {numbers:?}");
  println!("reversed: {reversed:?}");
}
