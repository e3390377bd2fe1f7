/*!
# Introductory Tutorial for TMLX

A TMLX program drives a cursor over a grid of colored pixels. Every line
of the program is one instruction. An instruction may paint the pixel
under the cursor, move the cursor one pixel, and then says which line
runs next. The program ends with `exit`, or by walking off the canvas.

Save the following as `hello.tmlx`.

```text
start: write black right goto start
```

Then run it on a blank canvas eight pixels wide and one pixel high.

```text
$ tmlx run hello.tmlx --size 8x1
########
exit 2
```

The cursor starts on the bottom left pixel. The line paints it black,
moves one pixel right, and jumps back to itself. When the cursor reaches
the right edge the next move would leave the canvas, so the program stops
with exit status 2. The `run` command exits with the same status, which
makes TMLX programs easy to check from a shell script.

Nothing decides anything yet. Branching looks at one thing only: whether
the pixel under the cursor is white.

```text
loop: if white write black right goto loop
exit 0
```

On a canvas that already has a black pixel somewhere along the bottom row,
this paints up to that pixel and then exits with status 0.

Use `tmlx compile` to see the program the way it will run, and
`tmlx debug` to step through it one instruction at a time.

*/
