/*!
# `In <register> <prompt>`
Also `Preg <register>`.

## Purpose
Read one word from the terminal into a register, or print a register.

## Remarks
The prompt is printed as written followed by a space. Only the first
word typed is kept. `Preg` prints the register and a newline.

## Example
```text
In name Who are you?
Print Hello ${name}\n
```

*/
