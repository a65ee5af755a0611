/*!
# Introductory Tutorial for macroplay

A macro script is a plain text file with one command per line. Run it by
giving its path to the executable.

<pre><code>&nbsp;$ macroplay hello.txt
</code></pre>

 Stop a running script with CTRL-C.

Here is a small script. It prints a greeting, moves the pointer to the
middle of an 800x600 screen and clicks.

```text
# hello.txt
Print Hello World\n
Move 400 300
click
```

Lines are trimmed before they are read. Blank lines and lines starting
with `#` are dropped when the script loads. The first word of a line is
the command. Commands are matched without regard to case so `print`,
`PRINT` and `Print` are the same thing.

## Registers

Registers hold text. `Set` stores into a register and `${name}` reads one
back anywhere text is expected.

```text
Set who World
Print Hello ${who}\n
```

A register that was never set reads as nothing at all. Numbers are just
text that happens to look like a number. When the whole of a piece of text
is numbers joined with `+` and `-`, the sum replaces it.

```text
Set x 5
Set y ${x} + 3
Preg y
8
```

## Counting

A register name followed by `++` or `--` counts up or down by one.
A register that does not hold a number counts from zero.

```text
Set n++
Set n++
Preg n
2
```

## Where to next

[Chapter 1](../__Chapter_1/index.html) covers labels, calls and
conditions. [Chapter 2](../__Chapter_2/index.html) lists every command.

## Dry runs

The shipped executable does not talk to a display server. Every mouse
and keyboard event is written to standard output instead so a script can
be checked before it is pointed at a real desktop.

<pre><code>&nbsp;$ macroplay hello.txt
&nbsp;Hello World
&nbsp;Move: 400 300 +10ms
&nbsp;ButtonPress: 1 +10ms
&nbsp;ButtonRelease: 1 +10ms
</code></pre>

Add `-v` to log each command as it runs, `-s 1.5` to scale coordinates
for a larger screen, or `-d 50` to slow every event down.
*/
